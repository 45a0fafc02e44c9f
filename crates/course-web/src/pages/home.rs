use leptos::prelude::*;

use crate::components::{ExternalLink, Section};
use crate::config::CONFIG;
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    let sessions = content::course()
        .sessions
        .iter()
        .map(|session| {
            let href = format!("/session/{}", session.slug);
            view! {
                <div>
                    <a href=href>{session.title.clone()} " \u{2192}"</a>
                </div>
            }
        })
        .collect_view();

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            </header>

            <Section id="about" title="About">
                <p>
                    "Short, self-contained sessions of working example scripts. "
                    "Every listing on this site is a runnable file: click any code "
                    "block to copy it, paste it into an editor, run it, break it."
                </p>
            </Section>

            <Section id="sessions" title="Sessions">
                <div class="space-y-1">{sessions}</div>
            </Section>

            <Section id="references" title="References">
                <div class="flex flex-wrap gap-4">
                    <ExternalLink href=CONFIG.links.python_docs.to_string() label="Python documentation".to_string() />
                    <ExternalLink href=CONFIG.links.peps.to_string() label="PEP 8".to_string() />
                </div>
            </Section>
        </main>
    }
}
