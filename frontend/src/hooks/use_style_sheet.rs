use web_sys::window;
use yew::prelude::*;

/// Appends a `<style>` element to the document head while the calling
/// component is mounted.
#[hook]
pub fn use_style_sheet(css: &'static str) {
    use_effect_with(css, move |css| {
        let style = window()
            .and_then(|w| w.document())
            .and_then(|document| {
                let head = document.head()?;
                let style = document.create_element("style").ok()?;
                style.set_text_content(Some(*css));
                head.append_child(&style).ok()?;
                Some(style)
            });

        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });
}
