//! Small helpers shared by the dashboard components.
//!
//! - **User Feedback**: `show_toast` injects a temporary notification.
//! - **Formatting**: money, plain numbers and signed percentages.
//! - **Requests**: `get_json` and `error_message` wrap the `gloo_net` calls
//!   every component makes against `/api`.

use common::responses::ErrorBody;
use gloo_net::http::{Request, Response};
use num_format::{Locale, ToFormattedString};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// `12345.6` -> `12,346` (whole units, thousands separated).
pub fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    rounded.to_formatted_string(&Locale::en)
}

/// `45231.89` -> `$45,231.89`; negative amounts keep the sign in front.
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}${}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// `20.1` -> `+20.1%`, `-4` -> `-4.0%`.
pub fn format_change(change: f64) -> String {
    format!("{:+.1}%", change)
}

/// Fetches `url` and decodes the JSON body, or returns a message for a toast.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// The `error` field of a failed response, or its status when there is none.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_grouped_with_cents() {
        assert_eq!(format_money(45231.89), "$45,231.89");
        assert_eq!(format_money(0.5), "$0.50");
        assert_eq!(format_money(-1250.0), "-$1,250.00");
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(format_change(20.1), "+20.1%");
        assert_eq!(format_change(-4.0), "-4.0%");
        assert_eq!(format_number(2350.4), "2,350");
    }
}
