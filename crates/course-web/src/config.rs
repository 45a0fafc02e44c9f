//! Static site identity used by the pages and the document shell.

pub struct Links {
    pub python_docs: &'static str,
    pub peps: &'static str,
}

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub base_url: &'static str,
    pub links: Links,
}

pub static CONFIG: SiteConfig = SiteConfig {
    name: "Practical Scripting",
    tagline: "a hands-on course in everyday Python, one session at a time",
    base_url: "https://practical-scripting.example.org",
    links: Links {
        python_docs: "https://docs.python.org/3/",
        peps: "https://peps.python.org/pep-0008/",
    },
};
