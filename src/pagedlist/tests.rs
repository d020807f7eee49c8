//! Tests for the paged list controller.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PagingConfig;
    use crate::scroll::ScrollMsg;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    type WindowLog = Arc<Mutex<Vec<(usize, usize)>>>;

    fn controller(page_size: usize) -> (Model<i32>, WindowLog) {
        let config = PagingConfig::new().with_page_size(page_size).with_load_threshold(2);
        let mut model = Model::new(Vec::new(), config);
        let log: WindowLog = Arc::new(Mutex::new(Vec::new()));
        let seen = log.clone();
        model.set_on_load_window(move |offset, count| {
            seen.lock().unwrap().push((offset, count));
        });
        (model, log)
    }

    fn page(start: i32, len: usize) -> Vec<i32> {
        (start..start + len as i32).collect()
    }

    /// Drives one full load cycle so the model ends up with `len` more items.
    fn load_page(model: &mut Model<i32>, start: i32, len: usize) {
        model.request_more();
        model.append(page(start, len));
        model.take_changes();
    }

    #[test]
    fn test_new_default_values() {
        let (model, log) = controller(20);

        assert_eq!(model.state(), PageState::Loaded);
        assert_eq!(model.len(), 0);
        assert!(model.is_empty());
        assert_eq!(model.item_count(), 0);
        assert_eq!(model.next_offset(), 0);
        assert_eq!(model.current_page(), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_request_asks_for_offset_zero() {
        let (mut model, log) = controller(20);

        model.request_more();

        assert_eq!(log.lock().unwrap().as_slice(), &[(0, 20)]);
        assert_eq!(model.state(), PageState::Loading);
        assert_eq!(
            model.take_changes(),
            vec![ListChange::Inserted { start: 0, count: 1 }] // footer appeared
        );
    }

    #[test]
    fn test_append_full_page() {
        let (mut model, _log) = controller(20);
        model.request_more();
        model.take_changes();

        model.append(page(0, 20));

        assert_eq!(model.state(), PageState::Loaded);
        assert_eq!(model.len(), 20);
        assert_eq!(model.next_offset(), 20);
        assert_eq!(model.current_page(), 1);
        assert_eq!(
            model.take_changes(),
            vec![
                ListChange::Removed { start: 0, count: 1 }, // footer left first
                ListChange::Inserted { start: 0, count: 20 },
            ]
        );
    }

    #[test]
    fn test_append_without_footer_emits_only_insertion() {
        let (mut model, _log) = controller(20);

        // Appending outside a load cycle: no footer to remove.
        model.append(page(0, 20));

        assert_eq!(
            model.take_changes(),
            vec![ListChange::Inserted { start: 0, count: 20 }]
        );
    }

    #[test]
    fn test_short_page_reaches_limit() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);

        model.request_more();
        model.append(page(20, 7));
        assert_eq!(model.state(), PageState::ReachedLimit);
        assert_eq!(model.len(), 27);

        // Terminal until reset: no further callback, no state change, no
        // notifications.
        let calls_before = log.lock().unwrap().len();
        model.take_changes();
        model.request_more();
        assert_eq!(log.lock().unwrap().len(), calls_before);
        assert_eq!(model.state(), PageState::ReachedLimit);
        assert!(model.take_changes().is_empty());
    }

    #[test]
    fn test_data_limit_reaches_limit() {
        let config = PagingConfig::new().with_page_size(20).with_data_limit(25);
        let mut model: Model<i32> = Model::new(Vec::new(), config);

        model.append(page(0, 20));
        assert_eq!(model.state(), PageState::Loaded); // 20 < 25

        model.request_more();
        model.append(page(20, 20));
        assert_eq!(model.state(), PageState::ReachedLimit); // 40 >= 25
    }

    #[test]
    fn test_item_count_includes_footer_only_while_loading_or_error() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);
        assert_eq!(model.item_count(), model.len());

        model.request_more();
        assert_eq!(model.item_count(), model.len() + 1);

        model.report_error();
        assert_eq!(model.item_count(), model.len() + 1);

        model.append(page(20, 3)); // short page
        assert_eq!(model.state(), PageState::ReachedLimit);
        assert_eq!(model.item_count(), model.len());
    }

    #[test]
    fn test_report_error_requires_inflight_load() {
        let (mut model, _log) = controller(20);

        model.report_error();

        assert_eq!(model.state(), PageState::Loaded);
        assert!(model.take_changes().is_empty());
    }

    #[test]
    fn test_report_error_switches_footer_in_place() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);
        model.request_more();
        model.take_changes();

        model.report_error();

        assert_eq!(model.state(), PageState::Error);
        assert_eq!(
            model.take_changes(),
            vec![ListChange::Changed { index: 20 }]
        );
    }

    #[test]
    fn test_retry_is_noop_outside_error_state() {
        let (mut model, log) = controller(20);

        model.retry();
        assert_eq!(model.state(), PageState::Loaded);
        assert!(log.lock().unwrap().is_empty());

        model.request_more();
        model.retry(); // already loading
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_retry_requests_the_failed_window_again() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);

        model.request_more();
        model.report_error();
        model.take_changes();

        model.retry();

        // The offset did not advance on failure.
        assert_eq!(log.lock().unwrap().as_slice(), &[(0, 20), (20, 20), (20, 20)]);
        assert_eq!(model.state(), PageState::Loading);
        assert_eq!(
            model.take_changes(),
            vec![ListChange::Changed { index: 20 }] // footer repurposed, not re-inserted
        );
    }

    #[test]
    fn test_page_callback_receives_one_indexed_pages() {
        let config = PagingConfig::new().with_page_size(20);
        let mut model: Model<i32> = Model::new(Vec::new(), config);
        let pages = Arc::new(Mutex::new(Vec::new()));
        let seen = pages.clone();
        model.set_on_load_page(move |p| seen.lock().unwrap().push(p));

        model.request_more();
        model.append(page(0, 20));
        model.request_more();

        assert_eq!(pages.lock().unwrap().as_slice(), &[1, 2]);
    }

    #[test]
    fn test_window_callback_takes_precedence() {
        let (mut model, log) = controller(20);
        let pages = Arc::new(Mutex::new(Vec::new()));
        let seen = pages.clone();
        model.set_on_load_page(move |p| seen.lock().unwrap().push(p));

        model.request_more();

        assert_eq!(log.lock().unwrap().as_slice(), &[(0, 20)]);
        assert!(pages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_insert_keeps_window_size() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);

        model.insert_at(-1, 0);

        assert_eq!(model.len(), 20);
        assert_eq!(model.items()[0], -1);
        assert_eq!(*model.items().last().unwrap(), 18); // former last (19) evicted
        assert_eq!(
            model.take_changes(),
            vec![
                ListChange::Inserted { start: 0, count: 1 },
                ListChange::Removed { start: 20, count: 1 },
            ]
        );
    }

    #[test]
    fn test_insert_at_end_is_accepted() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);

        // position == len inserts before the slot the eviction then clears.
        model.insert_at(99, 20);

        assert_eq!(model.len(), 20);
        assert_eq!(*model.items().last().unwrap(), 19);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_insert_past_end_panics() {
        let (mut model, _log) = controller(20);
        model.insert_at(1, 1);
    }

    #[test]
    fn test_remove_at_evicts_trailing_page_and_refetches() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        load_page(&mut model, 20, 20);
        assert_eq!(model.next_offset(), 40);

        model.remove_at(5);

        // The single removal, then the whole trailing page as one range.
        assert_eq!(
            model.take_changes(),
            vec![
                ListChange::Removed { start: 5, count: 1 },
                ListChange::Removed { start: 20, count: 20 },
                ListChange::Inserted { start: 20, count: 1 }, // footer for the refetch
            ]
        );
        assert_eq!(model.len(), 20);
        assert_eq!(model.next_offset(), 20);
        assert_eq!(model.state(), PageState::Loading);
        assert_eq!(log.lock().unwrap().last(), Some(&(20, 20)));
    }

    #[test]
    fn test_remove_at_triggers_exactly_one_request() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        load_page(&mut model, 20, 20);
        let calls_before = log.lock().unwrap().len();

        model.remove_at(0);

        assert_eq!(log.lock().unwrap().len(), calls_before + 1);
    }

    #[test]
    fn test_remove_at_while_loading_updates_bookkeeping_only() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        load_page(&mut model, 20, 20);
        model.request_more();
        let calls_before = log.lock().unwrap().len();

        model.remove_at(0);

        // The refetch is suppressed by the in-flight load, but the eviction
        // and offset retreat still happen.
        assert_eq!(log.lock().unwrap().len(), calls_before);
        assert_eq!(model.len(), 20);
        assert_eq!(model.next_offset(), 20);
        assert_eq!(model.state(), PageState::Loading);
    }

    #[test]
    fn test_remove_at_on_empty_collection_is_noop() {
        let (mut model, log) = controller(20);

        model.remove_at(0);

        assert!(log.lock().unwrap().is_empty());
        assert!(model.take_changes().is_empty());
    }

    #[test]
    fn test_remove_at_clamps_eviction_on_short_list() {
        let config = PagingConfig::new().with_page_size(10);
        let mut model: Model<i32> = Model::new(page(0, 3), config);

        model.remove_at(1);

        // Only two items remained after the removal; the eviction covers
        // what actually existed.
        assert!(model.is_empty());
        assert_eq!(
            model.take_changes(),
            vec![
                ListChange::Removed { start: 1, count: 1 },
                ListChange::Removed { start: 0, count: 2 },
                ListChange::Inserted { start: 0, count: 1 },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_past_end_panics() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);
        model.remove_at(20);
    }

    #[test]
    fn test_remove_item_by_equality() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);

        model.remove_item(&7);

        assert!(!model.items().contains(&7));
        assert_eq!(model.state(), PageState::Loading); // refetch started
    }

    #[test]
    fn test_remove_item_absent_is_noop() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        let calls_before = log.lock().unwrap().len();

        model.remove_item(&999);

        assert_eq!(model.len(), 20);
        assert_eq!(log.lock().unwrap().len(), calls_before);
        assert!(model.take_changes().is_empty());
    }

    #[test]
    fn test_reset_returns_to_initial_conditions() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);
        model.request_more();
        model.append(page(20, 3)); // short page: ReachedLimit
        model.take_changes();

        model.reset();

        assert_eq!(model.state(), PageState::Loaded);
        assert!(model.is_empty());
        assert_eq!(model.next_offset(), 0);
        assert_eq!(model.current_page(), 0);
        assert_eq!(
            model.take_changes(),
            vec![ListChange::Removed { start: 0, count: 23 }]
        );
    }

    #[test]
    fn test_reset_removes_footer_first() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);
        model.request_more();
        model.take_changes();

        model.reset();

        assert_eq!(
            model.take_changes(),
            vec![
                ListChange::Removed { start: 20, count: 1 }, // footer
                ListChange::Removed { start: 0, count: 20 },
            ]
        );
    }

    #[test]
    fn test_reset_then_append_matches_fresh_controller() {
        let (mut reused, _log1) = controller(20);
        load_page(&mut reused, 0, 20);
        load_page(&mut reused, 20, 20);
        reused.reset();
        reused.request_more();
        reused.append(page(100, 20));

        let (mut fresh, _log2) = controller(20);
        fresh.request_more();
        fresh.append(page(100, 20));

        assert_eq!(reused.items(), fresh.items());
        assert_eq!(reused.next_offset(), fresh.next_offset());
        assert_eq!(reused.current_page(), fresh.current_page());
        assert_eq!(reused.state(), fresh.state());
    }

    #[test]
    fn test_slot_classification() {
        let (mut model, _log) = controller(20);
        load_page(&mut model, 0, 20);

        assert_eq!(model.slot_at(0), SlotKind::Item);
        assert_eq!(model.slot_at(19), SlotKind::Item);
        assert_eq!(model.slot_at(20), SlotKind::Item); // no footer while Loaded

        model.request_more();
        assert_eq!(model.slot_at(20), SlotKind::FooterProgress);
        assert_eq!(model.slot_at(0), SlotKind::Item);

        model.report_error();
        assert_eq!(model.slot_at(20), SlotKind::FooterError);
    }

    #[test]
    fn test_scroll_near_end_requests_more() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);

        let msg: Msg = Box::new(ScrollMsg {
            total_item_count: 20,
            last_visible_index: 19,
            vertical_delta: 2,
        });
        model.update(&msg);

        assert_eq!(model.state(), PageState::Loading);
        assert_eq!(log.lock().unwrap().last(), Some(&(20, 20)));
    }

    #[test]
    fn test_scroll_far_from_end_is_ignored() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        let calls_before = log.lock().unwrap().len();

        let msg: Msg = Box::new(ScrollMsg {
            total_item_count: 20,
            last_visible_index: 10,
            vertical_delta: 2,
        });
        model.update(&msg);

        assert_eq!(model.state(), PageState::Loaded);
        assert_eq!(log.lock().unwrap().len(), calls_before);
    }

    #[test]
    fn test_scroll_during_error_is_ignored() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        model.request_more();
        model.report_error();
        let calls_before = log.lock().unwrap().len();

        let msg: Msg = Box::new(ScrollMsg {
            total_item_count: 21,
            last_visible_index: 20,
            vertical_delta: 2,
        });
        model.update(&msg);

        assert_eq!(model.state(), PageState::Error);
        assert_eq!(log.lock().unwrap().len(), calls_before);
    }

    #[test]
    fn test_take_changes_drains_the_journal() {
        let (mut model, _log) = controller(20);
        model.append(page(0, 20));

        assert!(!model.take_changes().is_empty());
        assert!(model.take_changes().is_empty());
    }

    #[test]
    fn test_progress_footer_renders_only_while_loading() {
        let footer = ProgressFooter::new();

        let loading = FooterDelegate::<i32>::render(&footer, PageState::Loading);
        assert!(loading.contains("Loading"));

        assert!(FooterDelegate::<i32>::render(&footer, PageState::Loaded).is_empty());
        assert!(FooterDelegate::<i32>::render(&footer, PageState::Error).is_empty());
        assert!(FooterDelegate::<i32>::render(&footer, PageState::ReachedLimit).is_empty());
    }

    #[test]
    fn test_progress_footer_advances_on_its_own_ticks() {
        let (mut model, _log) = controller(20);
        model.request_more(); // state: Loading
        let mut footer = ProgressFooter::new();

        let before = FooterDelegate::<i32>::render(&footer, PageState::Loading);
        let tick: Msg = Box::new(FooterTickMsg {
            time: std::time::SystemTime::now(),
            id: footer.id(),
        });
        let cmd = footer.update(&tick, &mut model);
        let after = FooterDelegate::<i32>::render(&footer, PageState::Loading);

        assert!(cmd.is_some()); // keeps animating while loading
        assert_ne!(before, after);
    }

    #[test]
    fn test_progress_footer_ignores_foreign_ticks() {
        let (mut model, _log) = controller(20);
        model.request_more();
        let mut footer = ProgressFooter::new();

        let tick: Msg = Box::new(FooterTickMsg {
            time: std::time::SystemTime::now(),
            id: footer.id() + 999,
        });
        let before = FooterDelegate::<i32>::render(&footer, PageState::Loading);
        let cmd = footer.update(&tick, &mut model);
        let after = FooterDelegate::<i32>::render(&footer, PageState::Loading);

        assert!(cmd.is_none());
        assert_eq!(before, after);
    }

    #[test]
    fn test_progress_footer_stops_ticking_once_idle() {
        let (mut model, _log) = controller(20);
        let mut footer = ProgressFooter::new();

        let tick: Msg = Box::new(FooterTickMsg {
            time: std::time::SystemTime::now(),
            id: footer.id(),
        });
        let cmd = footer.update(&tick, &mut model); // state: Loaded

        assert!(cmd.is_none());
    }

    #[test]
    fn test_error_footer_retry_key_restarts_the_load() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        model.request_more();
        model.report_error();
        let mut footer = ErrorFooter::new();

        let press: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::empty(),
        });
        footer.update(&press, &mut model);

        assert_eq!(model.state(), PageState::Loading);
        assert_eq!(log.lock().unwrap().last(), Some(&(20, 20)));
    }

    #[test]
    fn test_error_footer_retry_key_is_inert_outside_error_state() {
        let (mut model, log) = controller(20);
        load_page(&mut model, 0, 20);
        let calls_before = log.lock().unwrap().len();
        let mut footer = ErrorFooter::new();

        let press: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::empty(),
        });
        footer.update(&press, &mut model);

        assert_eq!(model.state(), PageState::Loaded);
        assert_eq!(log.lock().unwrap().len(), calls_before);
    }

    #[test]
    fn test_error_footer_renders_message_and_hint() {
        let footer = ErrorFooter::new();

        let rendered = FooterDelegate::<i32>::render(&footer, PageState::Error);
        assert!(rendered.contains("Couldn't load more items."));
        assert!(rendered.contains("press r to retry"));

        assert!(FooterDelegate::<i32>::render(&footer, PageState::Loading).is_empty());
    }

    #[test]
    fn test_default_delegate_renders_title_and_description() {
        let config = PagingConfig::default();
        let model = Model::new(vec![DefaultItem::new("Book 0", "Author 0")], config);
        let delegate = DefaultDelegate::new();

        let rendered = delegate.render(&model, 0, &model.items()[0]);
        assert!(rendered.contains("Book 0"));
        assert!(rendered.contains("Author 0"));
        assert_eq!(delegate.height(), 2);

        let mut title_only = DefaultDelegate::new();
        title_only.show_description = false;
        let rendered = title_only.render(&model, 0, &model.items()[0]);
        assert!(rendered.contains("Book 0"));
        assert!(!rendered.contains("Author 0"));
        assert_eq!(title_only.height(), 1);
    }
}
