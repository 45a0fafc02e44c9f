//! Smoke test: server-render the markup the copy binder relies on.

#[cfg(feature = "ssr")]
mod ssr {
    use course_web::components::CodeBlock;
    use course_web::content;
    use course_web::copy_code::CODE_BLOCK_SELECTOR;
    use course_web::pages::HomePage;
    use leptos::prelude::*;

    #[test]
    fn code_block_carries_the_bound_class() {
        let html = view! {
            <CodeBlock name="hello.sh" language="shell" source="echo hi" />
        }
        .to_html();

        // The rendered class must be the one the binder queries for.
        let class = CODE_BLOCK_SELECTOR
            .strip_prefix("pre.")
            .expect("selector should target pre blocks by class");
        assert!(html.contains(class), "missing {} in: {}", class, html);
        assert!(html.contains("echo hi"), "payload text missing: {}", html);
        assert!(html.contains("Click to copy"), "hint missing: {}", html);
    }

    #[test]
    fn listings_render_verbatim() {
        for session in &content::course().sessions {
            for listing in &session.listings {
                let html = view! {
                    <CodeBlock
                        name=listing.name.clone()
                        language=listing.language.clone()
                        source=listing.source.clone()
                    />
                }
                .to_html();

                // Lines with markup-significant characters get escaped by the
                // renderer; checking the plain lines is enough to catch any
                // trimming or reflow of the payload.
                for line in listing
                    .source
                    .lines()
                    .filter(|l| !l.is_empty() && !l.contains(['<', '>', '&', '"', '\'']))
                {
                    assert!(
                        html.contains(line),
                        "listing {} lost line {:?}",
                        listing.name,
                        line
                    );
                }
            }
        }
    }

    #[test]
    fn home_page_lists_every_session() {
        let html = view! { <HomePage /> }.to_html();

        for session in &content::course().sessions {
            assert!(
                html.contains(&session.title),
                "session {} missing from home page",
                session.slug
            );
            assert!(
                html.contains(&format!("/session/{}", session.slug)),
                "link to {} missing from home page",
                session.slug
            );
        }
    }
}
