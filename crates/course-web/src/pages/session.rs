use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{CodeBlock, Section};
use crate::config::CONFIG;
use crate::content::{self, Session};

#[component]
pub fn SessionPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    view! {
        {move || match content::course().session(&slug()) {
            Some(session) => view! { <SessionContent session=session /> }.into_any(),
            None => view! { <SessionNotFound /> }.into_any(),
        }}
    }
}

#[component]
fn SessionContent(session: &'static Session) -> impl IntoView {
    let title = format!("{} - {}", session.title, CONFIG.name);

    let listings = session
        .listings
        .iter()
        .map(|listing| {
            view! {
                <CodeBlock
                    name=listing.name.clone()
                    language=listing.language.clone()
                    source=listing.source.clone()
                />
            }
        })
        .collect_view();

    view! {
        <Title text=title />
        <main class="max-w-[80ch] mx-auto px-4 py-4 md:py-8">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold mb-2">{session.title.clone()}</h1>
                <div class="mt-2">
                    <a href="/" class="text-sm">"\u{2190} back to home"</a>
                </div>
            </header>

            {session.intro.clone().map(|intro| {
                view! { <p class="mb-6 text-[var(--ink-light)]">{intro}</p> }
            })}

            <Section id="listings" title="Listings">{listings}</Section>
        </main>
    }
}

#[component]
fn SessionNotFound() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 text-center">
            <h1 class="text-xl font-bold mb-2">"Session not found"</h1>
            <a href="/">"\u{2190} back to home"</a>
        </main>
    }
}
