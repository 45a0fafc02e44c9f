use leptos::prelude::*;

/// A copyable code listing.
///
/// The `source-code` class is what the hydrate-side binder targets: clicking
/// the block copies its text content verbatim. The caption sits outside the
/// `pre` so it never ends up on the clipboard.
#[component]
pub fn CodeBlock(
    /// File name shown in the caption
    #[prop(into)]
    name: String,
    /// Language tag shown next to the name
    #[prop(into)]
    language: String,
    /// Verbatim source text
    #[prop(into)]
    source: String,
) -> impl IntoView {
    view! {
        <figure class="mb-6">
            <figcaption class="flex justify-between text-sm text-[var(--ink-light)] mb-1">
                <span class="font-bold">{name}</span>
                <span>{language}</span>
            </figcaption>
            <pre class="source-code" title="Click to copy"><code>{source}</code></pre>
        </figure>
    }
}
