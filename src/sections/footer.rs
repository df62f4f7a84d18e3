use yew::prelude::*;

use crate::config::{CV_URL, GITHUB_URL, LINKEDIN_URL};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
.site-footer {
    background: black;
    color: #9ca3af;
    padding: 2.5rem 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    font-size: 0.875rem;
}

.site-footer-links {
    display: flex;
    gap: 1.5rem;
}

.site-footer-links a {
    color: #d1d5db;
    text-decoration: none;
    transition: color 0.3s;
}

.site-footer-links a:hover { color: #a78bfa; }
                "#}
            </style>
            <div class="site-footer-links">
                <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                <a href={CV_URL} target="_blank" rel="noopener noreferrer">{"CV"}</a>
            </div>
            <p>{"© モランディニ・ルイ－ジ"}</p>
        </footer>
    }
}
