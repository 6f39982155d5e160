use async_trait::async_trait;
use screen_framework::{FrameworkError, Screen, ScreenActor, Store};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Screen ---

#[derive(Clone, Debug, PartialEq, Default)]
struct TodoState {
    items: Vec<String>,
    mounts: u32,
}

#[derive(Debug)]
enum TodoCommand {
    Add(String),
    Remove(usize),
}

#[derive(Debug, thiserror::Error)]
#[error("No item at index {0}")]
struct TodoError(usize);

struct TodoScreen {
    store: Store<TodoState>,
}

#[async_trait]
impl Screen for TodoScreen {
    type Command = TodoCommand;
    type Reply = usize;
    type State = TodoState;
    type Context = Arc<AtomicU32>;
    type Error = TodoError;

    fn store(&self) -> &Store<TodoState> {
        &self.store
    }

    async fn on_mount(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        ctx.fetch_add(1, Ordering::SeqCst);
        self.store.update(|s| s.mounts += 1);
        Ok(())
    }

    async fn handle(
        &mut self,
        command: TodoCommand,
        _ctx: &Self::Context,
    ) -> Result<usize, Self::Error> {
        match command {
            TodoCommand::Add(item) => {
                self.store.update(|s| s.items.push(item));
            }
            TodoCommand::Remove(index) => {
                if index >= self.store.read(|s| s.items.len()) {
                    return Err(TodoError(index));
                }
                self.store.update(|s| {
                    s.items.remove(index);
                });
            }
        }
        Ok(self.store.read(|s| s.items.len()))
    }

    async fn on_unmount(&mut self, ctx: &Self::Context) {
        ctx.fetch_add(100, Ordering::SeqCst);
    }
}

// --- Tests ---

#[tokio::test]
async fn test_screen_full_lifecycle() {
    let hooks = Arc::new(AtomicU32::new(0));
    let screen = TodoScreen {
        store: Store::new(TodoState::default()),
    };
    let (actor, client) = ScreenActor::new(screen, 10);
    let handle = tokio::spawn(actor.run(hooks.clone()));

    // Commands queue behind the mount hook
    assert_eq!(client.send(TodoCommand::Add("milk".into())).await.unwrap(), 1);
    assert_eq!(client.send(TodoCommand::Add("bread".into())).await.unwrap(), 2);
    assert_eq!(hooks.load(Ordering::SeqCst), 1);

    let state = client.snapshot();
    assert_eq!(state.items, vec!["milk", "bread"]);
    assert_eq!(state.mounts, 1);

    // Rejected command leaves state untouched
    let err = client.send(TodoCommand::Remove(5)).await.unwrap_err();
    match err {
        FrameworkError::ScreenError(inner) => {
            let todo = inner.downcast::<TodoError>().expect("TodoError");
            assert_eq!(todo.0, 5);
        }
        other => panic!("Expected ScreenError, got {other:?}"),
    }
    assert_eq!(client.snapshot().items.len(), 2);

    // Remount re-runs the hook
    client.remount().await.unwrap();
    assert_eq!(client.snapshot().mounts, 2);

    // Dropping the last client unmounts the screen
    drop(client);
    handle.await.unwrap();
    assert_eq!(hooks.load(Ordering::SeqCst), 102);
}

#[tokio::test]
async fn test_subscribers_observe_each_change() {
    let screen = TodoScreen {
        store: Store::new(TodoState::default()),
    };
    let (actor, client) = ScreenActor::new(screen, 10);
    tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

    let mut rx = client.subscribe();
    client.send(TodoCommand::Add("eggs".into())).await.unwrap();

    let state = rx
        .wait_for(|s| s.items.len() == 1)
        .await
        .expect("screen alive")
        .clone();
    assert_eq!(state.items[0], "eggs");
}

#[tokio::test]
async fn test_send_after_shutdown_reports_closed() {
    let screen = TodoScreen {
        store: Store::new(TodoState::default()),
    };
    let (actor, client) = ScreenActor::new(screen, 10);
    let handle = tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));
    handle.abort();
    let _ = handle.await;

    let result = client.send(TodoCommand::Add("late".into())).await;
    assert!(matches!(
        result,
        Err(FrameworkError::ActorClosed) | Err(FrameworkError::ActorDropped)
    ));
}
