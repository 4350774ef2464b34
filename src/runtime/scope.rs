use std::cell::RefCell;

use super::Channel;
use crate::provider::ListManager;

struct Frame {
    channel: usize,
    manager: ListManager,
}

// Thread-local stack of active providers, innermost last.
thread_local! {
    static PROVIDER_STACK: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` with `manager` published on `channel`.
///
/// The frame is pushed for the duration of `f` and popped afterwards, even
/// if `f` panics.
pub(crate) fn with_provider<F, R>(channel: &Channel, manager: ListManager, f: F) -> R
where
    F: FnOnce() -> R,
{
    tracing::trace!(list = %channel.name(), channel = channel.id(), "Entering provider scope");
    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().push(Frame {
            channel: channel.id(),
            manager,
        });
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    PROVIDER_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
    tracing::trace!(list = %channel.name(), channel = channel.id(), "Left provider scope");

    match result {
        Ok(r) => r,
        Err(e) => std::panic::resume_unwind(e),
    }
}

/// The value published by the innermost active provider on `channel`.
pub(crate) fn nearest(channel: &Channel) -> Option<ListManager> {
    PROVIDER_STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .rev()
            .find(|frame| frame.channel == channel.id())
            .map(|frame| frame.manager.clone())
    })
}

/// Number of providers active on the current thread.
#[cfg(test)]
fn depth() -> usize {
    PROVIDER_STACK.with(|stack| stack.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Registry;
    use crate::ListConfig;

    fn manager(registry: &Registry, name: &str) -> ListManager {
        ListManager::new(registry.channel(name), ListConfig::new(name))
    }

    #[test]
    fn innermost_frame_wins() {
        let registry = Registry::new();
        let channel = registry.channel("a");
        let outer = manager(&registry, "a");
        let inner = manager(&registry, "a");

        with_provider(&channel, outer.clone(), || {
            assert!(nearest(&channel).unwrap().same_list(&outer));
            with_provider(&channel, inner.clone(), || {
                assert!(nearest(&channel).unwrap().same_list(&inner));
                assert_eq!(depth(), 2);
            });
            assert!(nearest(&channel).unwrap().same_list(&outer));
        });
        assert!(nearest(&channel).is_none());
        assert_eq!(depth(), 0);
    }

    #[test]
    fn frame_popped_on_panic() {
        let registry = Registry::new();
        let channel = registry.channel("a");
        let m = manager(&registry, "a");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_provider(&channel, m, || panic!("render failed"));
        }));
        assert!(result.is_err());
        assert_eq!(depth(), 0);
    }
}
