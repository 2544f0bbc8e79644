use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::region::fetch_region;

const LOADING_PLACEHOLDER: &str = "loading...";

// Pushes the reveal ahead of raw scroll progress so the last words turn
// white before the page bottoms out.
const SCROLL_GAIN: f64 = 1.5;
const REVEAL_FRACTION: f64 = 0.7;

fn text_lines(region: &str) -> Vec<Vec<&str>> {
    vec![
        vec!["Designed", "for", "global"],
        vec!["scale,", "built", "for"],
        vec!["enterprise", "needs."],
        vec!["Our", "infrastructure"],
        vec!["spans", "multiple"],
        vec!["AWS", "regions,"],
        vec!["currently", "hosted", "in"],
        vec![region],
        vec!["ensuring", "maximum"],
        vec!["uptime", "and"],
        vec!["reliability", "with"],
        vec!["automated", "failover"],
        vec!["capabilities,"],
        vec!["24/7", "availability."],
    ]
}

fn total_word_count() -> usize {
    text_lines(LOADING_PLACEHOLDER)
        .iter()
        .map(|line| line.len())
        .sum()
}

/// Index of the last word rendered as active for the given scroll metrics.
/// Pages without scrollable range clamp to 0 instead of dividing by zero.
fn visible_index(scroll_y: f64, scroll_height: f64, inner_height: f64, total_words: usize) -> usize {
    let scrollable_height = scroll_height - inner_height;
    if scrollable_height <= 0.0 {
        return 0;
    }
    let scroll_percentage = (scroll_y / scrollable_height) * SCROLL_GAIN;
    let index = (scroll_percentage * total_words as f64 * REVEAL_FRACTION).floor();
    if index.is_sign_negative() {
        0
    } else {
        index as usize
    }
}

#[function_component(ScrollingText)]
pub fn scrolling_text() -> Html {
    let region = use_state(|| None::<String>);
    let visible = use_state(|| 0usize);

    {
        let region = region.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    region.set(fetch_region().await);
                });
                || ()
            },
            (),
        );
    }

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();
                let total_words = total_word_count();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let scroll_height = document
                        .document_element()
                        .map(|element| element.scroll_height() as f64)
                        .unwrap_or(0.0);
                    let inner_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);
                    visible.set(visible_index(scroll_y, scroll_height, inner_height, total_words));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                // Initial check
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let display_region = region.as_deref().unwrap_or(LOADING_PLACEHOLDER).to_string();
    let lines = text_lines(&display_region);

    let mut rendered_lines: Vec<Html> = Vec::with_capacity(lines.len());
    let mut word_counter = 0usize;
    for line in &lines {
        let mut words: Vec<Html> = Vec::with_capacity(line.len() * 2);
        for (word_index, word) in line.iter().enumerate() {
            let class = if region.as_deref() == Some(*word) {
                "scroll-word region"
            } else if word_counter <= *visible {
                "scroll-word active"
            } else {
                "scroll-word dimmed"
            };
            word_counter += 1;
            words.push(html! { <span class={class}>{ *word }</span> });
            if word_index < line.len() - 1 {
                words.push(html! { {" "} });
            }
        }
        rendered_lines.push(html! { <p class="scroll-line">{ for words }</p> });
    }

    html! {
        <section class="scroll-text">
            <div class="scroll-text-content">
                { for rendered_lines }
            </div>
            <style>
                {r#"
                    .scroll-text {
                        padding: 0 1.5rem;
                    }
                    .scroll-text-content {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .scroll-line {
                        font-size: 4.5rem;
                        font-weight: 700;
                        line-height: 1.25;
                        letter-spacing: -0.025em;
                        margin: 0 0 4rem 0;
                    }
                    @media (min-width: 768px) {
                        .scroll-line {
                            font-size: 6rem;
                        }
                    }
                    .scroll-word {
                        transition: color 0.3s ease;
                    }
                    .scroll-word.active {
                        color: #ffffff;
                    }
                    .scroll-word.dimmed {
                        color: #1f2937;
                    }
                    .scroll-word.region {
                        color: #f97316;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_is_fixed() {
        assert_eq!(total_word_count(), 29);
    }

    #[test]
    fn region_line_holds_the_placeholder_until_resolved() {
        let lines = text_lines(LOADING_PLACEHOLDER);
        assert!(lines.iter().any(|line| line == &vec![LOADING_PLACEHOLDER]));
    }

    #[test]
    fn top_of_page_reveals_only_the_first_word() {
        assert_eq!(visible_index(0.0, 2000.0, 1000.0, total_word_count()), 0);
    }

    #[test]
    fn bottom_of_page_reveals_every_word() {
        let total_words = total_word_count();
        let index = visible_index(1000.0, 2000.0, 1000.0, total_words);
        assert_eq!(index, 30);
        assert!(index >= total_words - 1);
    }

    #[test]
    fn index_never_decreases_as_scroll_grows() {
        let total_words = total_word_count();
        let mut last = 0;
        for step in 0..=100 {
            let index = visible_index(f64::from(step) * 10.0, 2000.0, 1000.0, total_words);
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn unscrollable_page_clamps_to_zero() {
        assert_eq!(visible_index(0.0, 1000.0, 1000.0, 29), 0);
        assert_eq!(visible_index(250.0, 1000.0, 1000.0, 29), 0);
        assert_eq!(visible_index(250.0, 800.0, 1000.0, 29), 0);
    }

    #[test]
    fn negative_scroll_clamps_to_zero() {
        assert_eq!(visible_index(-200.0, 2000.0, 1000.0, 29), 0);
    }
}
