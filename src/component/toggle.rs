//! An on/off switch.

use ripple_core::{
    Component, Error, EventHandler, PropValue, Props, Scope, State, VNode, children,
    create_element, props,
};

/// Two buttons driving a boolean `is_on` state.
#[derive(Debug)]
pub struct Toggle {
    scope: Scope,
}

impl Toggle {
    fn switch(&self, to: bool) -> EventHandler {
        let scope = self.scope.clone();
        EventHandler::new(move |_event| {
            if let Err(error) = scope.set_state(props! { "is_on" => to }) {
                tracing::error!("failed to apply toggle update: {error}");
            }
        })
    }
}

impl Component for Toggle {
    fn create(_props: Props, scope: Scope) -> Self {
        Self { scope }
    }

    fn initial_state(&self) -> State {
        props! { "is_on" => false }
    }

    fn render(&self, _props: &Props, state: &State) -> Result<Option<VNode>, Error> {
        let is_on = state
            .get("is_on")
            .and_then(PropValue::as_bool)
            .unwrap_or_default();
        let status = if is_on { "on" } else { "off" };

        let line = create_element(
            "p",
            props! { "textContent" => format!("Toggle is {status}") },
            children![],
        )?;
        let on = create_element(
            "button",
            props! { "textContent" => "On", "onClick" => self.switch(true) },
            children![],
        )?;
        let off = create_element(
            "button",
            props! { "textContent" => "Off", "onClick" => self.switch(false) },
            children![],
        )?;

        create_element("div", Props::new(), children![line, on, off]).map(Some)
    }
}
