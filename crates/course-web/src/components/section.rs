use leptos::prelude::*;

/// Section wrapper with a linkable heading.
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-10">
            <h2 class="font-bold uppercase tracking-wide border-b border-dashed border-[var(--rule)] pb-1 mb-3">
                {title}
                <a href=anchor_href class="section-anchor ml-2">"\u{00A7}"</a>
            </h2>
            {children()}
        </section>
    }
}
