//! Live robotics updates panel rendered into `#live-news`.

use leptos::prelude::*;

use crate::state::news::FeedState;

pub const HOST_ID: &str = "live-news";

/// Feed list plus status line; shows only the status line while loading or
/// when the source came back empty.
#[component]
pub fn LiveNewsFeed(feed: RwSignal<FeedState>) -> impl IntoView {
    move || {
        let state = feed.get();
        let status = state.status_text();
        match state {
            FeedState::Ready { items, .. } => view! {
                <div class="live-news-list">
                    {items
                        .into_iter()
                        .map(|item| {
                            let meta = item.meta();
                            view! {
                                <div class="live-news-item">
                                    <div class="live-news-title">{item.title}</div>
                                    <div class="live-news-meta">{meta}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="live-news-status">{status}</p>
            }
            .into_any(),
            FeedState::Loading | FeedState::Empty => view! { <p class="live-news-status">{status}</p> }.into_any(),
        }
    }
}

#[cfg(feature = "csr")]
fn local_clock() -> String {
    let now = js_sys::Date::new_0();
    crate::state::news::format_clock(now.get_hours(), now.get_minutes())
}

#[cfg(feature = "csr")]
pub fn mount(source: std::rc::Rc<dyn crate::state::news::NewsSource>) {
    use crate::state::news::load_feed;
    use crate::util::dom;

    let Some(host) = dom::html_element_by_id(HOST_ID) else {
        log::debug!("live news host not present");
        return;
    };
    host.set_inner_html("");

    leptos::mount::mount_to(host, move || {
        let feed = RwSignal::new(FeedState::Loading);
        leptos::task::spawn_local(async move {
            let state = load_feed(source.as_ref(), local_clock).await;
            log::debug!("live news settled: {}", state.status_text());
            feed.set(state);
        });
        view! { <LiveNewsFeed feed/> }
    })
    .forget();
}
