// ============================================================================
// FIELD INPUT VIEW - Input controlado con label
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, event_target_value, on_input, set_control_value, ElementBuilder};
use crate::state::field_input::{FieldInputProps, FieldInputState};

pub type ChangeCallback = Rc<dyn Fn(&str)>;

pub fn render_field_input(
    props: &FieldInputProps,
    on_change: Option<ChangeCallback>,
) -> Result<Element, JsValue> {
    let state = Rc::new(RefCell::new(FieldInputState::from_props(props)));

    let wrapper = ElementBuilder::new("div")?.class("w-full").build();
    let label = ElementBuilder::new("label")?.text(&props.label).build();

    let input = ElementBuilder::new("input")?
        .class("border border-gray-300 rounded w-full px-2 py-1 disabled:bg-gray-200")
        .attr("type", &props.input_type)?
        .attr("name", &props.field_name())?
        .flag("required", props.required)?
        .flag("disabled", props.disabled)?
        .build();
    set_control_value(&input, state.borrow().display());

    {
        let input_clone = input.clone();
        on_input(&input, move |e| {
            let Some(value) = event_target_value(&e) else {
                return;
            };
            let mut field = state.borrow_mut();
            field.keystroke(&value, on_change.as_deref());
            set_control_value(&input_clone, field.display());
        })?;
    }

    append_child(&wrapper, &label)?;
    append_child(&wrapper, &input)?;
    Ok(wrapper)
}
