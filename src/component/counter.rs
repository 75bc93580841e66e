//! A click counter.

use ripple_core::{
    Component, Error, EventHandler, PropValue, Props, Scope, State, VNode, children,
    create_element, props,
};

/// Stateful counter: a display line plus an increment button.
#[derive(Debug)]
pub struct Counter {
    scope: Scope,
}

impl Counter {
    fn count(state: &State) -> f64 {
        state
            .get("count")
            .and_then(PropValue::as_number)
            .unwrap_or_default()
    }
}

impl Component for Counter {
    fn create(_props: Props, scope: Scope) -> Self {
        Self { scope }
    }

    fn initial_state(&self) -> State {
        props! { "count" => 0.0 }
    }

    fn render(&self, props: &Props, state: &State) -> Result<Option<VNode>, Error> {
        let count = Self::count(state);

        let scope = self.scope.clone();
        let increment = EventHandler::new(move |_event| {
            if let Err(error) = scope.set_state(props! { "count" => count + 1.0 }) {
                tracing::error!("failed to apply counter update: {error}");
            }
        });

        let display = create_element(
            "p",
            props! { "textContent" => format!("Count: {count}") },
            children![],
        )?;
        let button = create_element(
            "button",
            props! { "textContent" => "Increment", "onClick" => increment },
            children![],
        )?;

        create_element("div", props.clone(), children![display, button]).map(Some)
    }
}
