use super::consumer::resolve;
use crate::error::{Accessor, ListError, NameSite, Result};
use crate::provider::ListManager;
use crate::runtime::Registry;

/// Something that renders props into output.
///
/// Implemented for every `Fn(P) -> O`, so plain closures are components.
pub trait Component<P> {
    type Output;

    fn render(&self, props: P) -> Self::Output;
}

impl<P, O, F> Component<P> for F
where
    F: Fn(P) -> O,
{
    type Output = O;

    fn render(&self, props: P) -> O {
        self(props)
    }
}

/// Props handed to a component wrapped by [`with_list_manager`].
#[derive(Debug, Clone)]
pub struct Managed<P> {
    /// The props the wrapper was rendered with, untouched.
    pub props: P,
    pub list_manager: ListManager,
}

/// A component that receives the list published under a fixed name.
pub struct WithListManager<C> {
    component: C,
    name: String,
    registry: Registry,
}

impl<C> WithListManager<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped component.
    pub fn inner(&self) -> &C {
        &self.component
    }
}

impl<P, C> Component<P> for WithListManager<C>
where
    C: Component<Managed<P>>,
{
    type Output = Result<C::Output>;

    fn render(&self, props: P) -> Self::Output {
        let list_manager = resolve(&self.registry, &self.name, Accessor::WithListManager)?;
        Ok(self.component.render(Managed {
            props,
            list_manager,
        }))
    }
}

/// Wrap `component` so every render receives the list `name` as
/// [`Managed::list_manager`].
///
/// The name is checked now; the provider is looked up on each render.
///
/// ```
/// use tinlist::{with_list_manager, Component, ListConfig, ListProvider, Managed, Registry};
///
/// let registry = Registry::new();
/// let count = with_list_manager(
///     &registry,
///     |m: Managed<&str>| format!("{}: {}", m.props, m.list_manager.items().len()),
///     "todos",
/// )
/// .unwrap();
///
/// let provider = ListProvider::new(&registry, ListConfig::new("todos")).unwrap();
/// let out = provider.provide(|| count.render("todos")).unwrap();
/// assert_eq!(out, "todos: 0");
/// ```
pub fn with_list_manager<C>(registry: &Registry, component: C, name: &str) -> Result<WithListManager<C>> {
    if name.is_empty() {
        return Err(ListError::MissingName {
            site: NameSite::WithListManager,
        });
    }
    Ok(WithListManager {
        component,
        name: name.to_owned(),
        registry: registry.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListConfig, ListProvider};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn requires_name_at_wrap_time() {
        let registry = Registry::new();
        let err = with_list_manager(&registry, |_: Managed<()>| (), "").err();
        assert_eq!(
            err,
            Some(ListError::MissingName {
                site: NameSite::WithListManager
            })
        );
    }

    #[test]
    fn unmatched_name_reports_adapter() {
        let registry = Registry::new();
        let wrapped = with_list_manager(&registry, |_: Managed<()>| (), "missing").unwrap();
        let provider = ListProvider::new(&registry, ListConfig::new("present")).unwrap();

        let err = provider.provide(|| wrapped.render(())).unwrap_err();
        assert_eq!(
            err,
            ListError::NoProvider {
                name: "missing".into(),
                accessor: Accessor::WithListManager
            }
        );
    }

    #[test]
    fn forwards_props_and_list() {
        struct Props {
            title: &'static str,
            node: Rc<Cell<u32>>,
        }

        let registry = Registry::new();
        let provider = ListProvider::new(&registry, ListConfig::new("todos").key_by("id")).unwrap();
        let wrapped = with_list_manager(
            &registry,
            |m: Managed<Props>| {
                m.props.node.set(7);
                (m.props.title, m.list_manager.keyed().is_some())
            },
            "todos",
        )
        .unwrap();

        let node = Rc::new(Cell::new(0));
        let out = provider
            .provide(|| {
                wrapped.render(Props {
                    title: "Hello, world!",
                    node: Rc::clone(&node),
                })
            })
            .unwrap();

        assert_eq!(out, ("Hello, world!", true));
        // the handle inside props reached the inner component
        assert_eq!(node.get(), 7);
        assert_eq!(wrapped.name(), "todos");
    }
}
