//! Synchronizer Integration Tests
//!
//! Drives the synchronizer against the in-memory store.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::{
        Filter, MemoryRemote, NewTodo, SyncError, SyncResult, Synchronizer, Todo, TodoRemote,
        ViewState,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    struct Harness<R> {
        remote: Rc<R>,
        view: Rc<RefCell<ViewState>>,
        sync: Synchronizer<R>,
    }

    fn harness_with<R: TodoRemote + 'static>(remote: R) -> Harness<R> {
        init_tracing();
        let remote = Rc::new(remote);
        let view = Rc::new(RefCell::new(ViewState::default()));
        let sink = Rc::clone(&view);
        let sync = Synchronizer::with_shared(Rc::clone(&remote), move |snapshot| {
            sink.borrow_mut().apply(snapshot);
        });
        Harness { remote, view, sync }
    }

    async fn setup(records: &[(&str, bool)]) -> Harness<MemoryRemote> {
        let h = harness_with(MemoryRemote::seeded(records.iter().copied()));
        h.sync.load_all().await.expect("initial load");
        h.remote.clear_requests();
        h
    }

    fn shown(h: &Harness<MemoryRemote>) -> Vec<Todo> {
        h.view.borrow().todos.clone()
    }

    fn id_of(h: &Harness<MemoryRemote>, text: &str) -> String {
        h.view
            .borrow()
            .todos
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.id.clone())
            .expect("task present")
    }

    #[tokio::test]
    async fn test_load_all_replaces_state() {
        let h = setup(&[("Read book", false), ("Jog", true)]).await;

        let view = h.view.borrow();
        assert_eq!(view.len(), 2);
        assert_eq!(view.todos[0].text, "Read book");
        assert_eq!(view.todos[1].text, "Jog");
        assert_eq!(view.filter, Filter::All);
    }

    #[tokio::test]
    async fn test_create_adds_one_incomplete_record() {
        let h = setup(&[("Existing", true)]).await;
        let before = h.view.borrow().len();

        h.sync.create_task("x").await.expect("create");

        let after = shown(&h);
        assert_eq!(after.len(), before + 1);
        let created: Vec<_> = after.iter().filter(|t| t.text == "x").collect();
        assert_eq!(created.len(), 1);
        assert!(!created[0].completed);
        assert!(!created[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_flips_and_restores() {
        let h = setup(&[("Laundry", false)]).await;
        let id = id_of(&h, "Laundry");

        h.sync.toggle_completed(&id, false).await.expect("toggle on");
        assert!(h.view.borrow().find(&id).expect("present").completed);

        h.sync.toggle_completed(&id, true).await.expect("toggle off");
        assert!(!h.view.borrow().find(&id).expect("present").completed);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let h = setup(&[("Keep", false), ("Drop", false)]).await;
        let id = id_of(&h, "Drop");

        h.sync.delete_task(&id).await.expect("delete");

        assert!(h.view.borrow().find(&id).is_none());
        assert_eq!(h.view.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_completed_leaves_only_active() {
        let h = setup(&[("a", true), ("b", false), ("c", true)]).await;

        h.sync.clear_completed().await.expect("clear");

        let todos = shown(&h);
        assert_eq!(todos.len(), 1);
        assert!(todos.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_load_filtered_by_keyword() {
        let h = setup(&[("a", true), ("b", false), ("c", true)]).await;

        h.sync.load_filtered("active").await.expect("active");
        assert!(shown(&h).iter().all(|t| !t.completed));
        assert_eq!(h.view.borrow().len(), 1);
        assert_eq!(h.view.borrow().filter, Filter::Active);

        h.sync.load_filtered("completed").await.expect("completed");
        assert!(shown(&h).iter().all(|t| t.completed));
        assert_eq!(h.view.borrow().len(), 2);
        assert_eq!(h.view.borrow().filter, Filter::Completed);

        h.sync.load_filtered("all").await.expect("all");
        assert_eq!(h.view.borrow().len(), 3);
        assert_eq!(h.view.borrow().filter, Filter::All);
    }

    #[tokio::test]
    async fn test_unknown_keyword_forwarded_and_filter_kept() {
        let h = setup(&[("a", true)]).await;
        h.sync.load_filtered("completed").await.expect("completed");

        h.sync.load_filtered("Someday").await.expect("forwarded");

        assert_eq!(
            h.remote.requests().last().map(String::as_str),
            Some("GET /todo?filterKeyword=Someday")
        );
        assert_eq!(h.view.borrow().filter, Filter::Completed);
    }

    #[tokio::test]
    async fn test_mutation_resets_to_full_list() {
        let h = setup(&[("a", true), ("b", false)]).await;
        h.sync.load_filtered("completed").await.expect("completed");
        assert_eq!(h.view.borrow().len(), 1);

        h.sync.create_task("c").await.expect("create");

        assert_eq!(h.view.borrow().len(), 3);
        assert_eq!(h.view.borrow().filter, Filter::All);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_list_unchanged() {
        let h = setup(&[("a", false), ("b", true)]).await;
        let before = h.view.borrow().clone();
        let id = id_of(&h, "a");

        h.remote.set_offline(true);
        assert!(matches!(h.sync.create_task("new").await, Err(SyncError::Transport(_))));
        assert!(h.sync.delete_task(&id).await.is_err());
        assert!(h.sync.toggle_completed(&id, false).await.is_err());
        assert!(h.sync.clear_completed().await.is_err());
        assert!(h.sync.load_all().await.is_err());

        assert_eq!(*h.view.borrow(), before);
    }

    #[tokio::test]
    async fn test_failed_filtered_load_keeps_list_and_filter() {
        let h = setup(&[("a", true), ("b", false)]).await;
        h.sync.load_filtered("completed").await.expect("completed");
        let before = h.view.borrow().clone();
        assert_eq!(before.filter, Filter::Completed);

        h.remote.set_offline(true);
        let result = h.sync.load_filtered("active").await;

        assert!(matches!(result, Err(SyncError::Transport(_))));
        assert_eq!(*h.view.borrow(), before);
    }

    #[tokio::test]
    async fn test_rejected_mutation_skips_reload() {
        let h = setup(&[("a", false)]).await;

        let err = h.sync.delete_task("missing").await.unwrap_err();

        assert!(matches!(err, SyncError::Status { status: 404, .. }));
        assert_eq!(h.remote.requests(), vec!["DELETE /todo/missing".to_string()]);
    }

    #[tokio::test]
    async fn test_one_reconciliation_fetch_per_mutation() {
        let h = setup(&[("a", true), ("b", false)]).await;
        let id = id_of(&h, "b");

        h.sync.create_task("c").await.expect("create");
        h.sync.toggle_completed(&id, false).await.expect("toggle");
        h.sync.clear_completed().await.expect("clear");

        assert_eq!(
            h.remote.requests(),
            vec![
                "POST /todo".to_string(),
                "GET /todo".to_string(),
                format!("PUT /todo/{id}"),
                "GET /todo".to_string(),
                "DELETE /todo".to_string(),
                "GET /todo".to_string(),
            ]
        );
    }

    /// Accepts every mutation but cannot list
    #[derive(Default)]
    struct WriteOnly {
        inner: MemoryRemote,
    }

    #[async_trait(?Send)]
    impl TodoRemote for WriteOnly {
        async fn fetch(&self, _filter: Option<&str>) -> SyncResult<Vec<Todo>> {
            Err(SyncError::Status {
                operation: "fetch",
                status: 503,
            })
        }

        async fn create(&self, todo: &NewTodo) -> SyncResult<()> {
            self.inner.create(todo).await
        }

        async fn set_completed(&self, id: &str, completed: bool) -> SyncResult<()> {
            self.inner.set_completed(id, completed).await
        }

        async fn delete(&self, id: &str) -> SyncResult<()> {
            self.inner.delete(id).await
        }

        async fn clear_completed(&self) -> SyncResult<()> {
            self.inner.clear_completed().await
        }
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_stale_list() {
        let h = harness_with(WriteOnly::default());

        h.sync.create_task("stored").await.expect("mutation succeeded");

        assert!(h.view.borrow().is_empty());
        assert_eq!(h.remote.inner.records().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let h = setup(&[]).await;
        let copy = h.sync.clone();

        copy.create_task("from clone").await.expect("create");

        assert_eq!(h.view.borrow().len(), 1);
        assert_eq!(h.sync.remote().records().len(), 1);
    }
}
