//! Comparator request form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ComparatorFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ComparatorFormComponent;

impl Component for ComparatorFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ComparatorFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
