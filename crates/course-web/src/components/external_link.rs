use leptos::prelude::*;

/// External reference link, opened in a new tab.
#[component]
pub fn ExternalLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="underline decoration-dashed underline-offset-4 hover:text-[var(--ink)]"
        >
            {label} " \u{2197}"
        </a>
    }
}
