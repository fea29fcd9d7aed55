#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use spectrum_view::{DomHandle, DomRef, Footer};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HostProps {
    dom_ref: DomRef,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    html! { <Footer dom_ref={props.dom_ref.clone()}>{ "Built with care" }</Footer> }
}

fn fresh_root() -> Element {
    let doc = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn cell_ref_resolves_to_rendered_footer() {
    let handle = DomHandle::new();
    Renderer::<Host>::with_root_and_props(
        fresh_root(),
        HostProps {
            dom_ref: handle.dom_ref(),
        },
    )
    .render();
    settle().await;

    let node = handle.dom_node().expect("footer should be attached");
    assert_eq!(node.tag_name(), "FOOTER");
    let text = node
        .dyn_into::<HtmlElement>()
        .expect("footer is an html element")
        .inner_text();
    assert_eq!(text, "Built with care");
}

#[wasm_bindgen_test]
async fn callback_ref_receives_rendered_footer() {
    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let callback = recording_callback(&seen);
    Renderer::<Host>::with_root_and_props(
        fresh_root(),
        HostProps {
            dom_ref: DomRef::Callback(callback),
        },
    )
    .render();
    settle().await;

    assert_eq!(seen.borrow().as_slice(), &[Some("FOOTER".to_string())]);
}

fn recording_callback(seen: &Rc<RefCell<Vec<Option<String>>>>) -> Callback<Option<Element>> {
    let seen = seen.clone();
    Callback::from(move |node: Option<Element>| {
        seen.borrow_mut().push(node.map(|node| node.tag_name()));
    })
}

#[wasm_bindgen_test]
async fn callback_ref_is_released_on_swap_and_teardown() {
    let first: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let second: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let mut app = Renderer::<Host>::with_root_and_props(
        fresh_root(),
        HostProps {
            dom_ref: DomRef::Callback(recording_callback(&first)),
        },
    )
    .render();
    settle().await;
    assert_eq!(first.borrow().as_slice(), &[Some("FOOTER".to_string())]);

    app.update(HostProps {
        dom_ref: DomRef::Callback(recording_callback(&second)),
    });
    settle().await;
    assert_eq!(
        first.borrow().as_slice(),
        &[Some("FOOTER".to_string()), None]
    );
    assert_eq!(second.borrow().as_slice(), &[Some("FOOTER".to_string())]);

    app.destroy();
    settle().await;
    assert_eq!(first.borrow().len(), 2);
    assert_eq!(
        second.borrow().as_slice(),
        &[Some("FOOTER".to_string()), None]
    );
}

#[wasm_bindgen_test]
async fn unset_ref_still_renders() {
    let root = fresh_root();
    Renderer::<Host>::with_root_and_props(
        root.clone(),
        HostProps {
            dom_ref: DomRef::Unset,
        },
    )
    .render();
    settle().await;

    let footer = root
        .query_selector("footer")
        .expect("query footer")
        .expect("footer exists");
    assert_eq!(footer.child_element_count(), 0);
}
