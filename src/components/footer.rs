use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer-content">
                <p class="site-footer-name">{"Pavan Gurram"}</p>
                <p class="site-footer-link">
                    <a href="https://pavangurram.com" target="_blank" rel="noopener noreferrer">
                        {"pavangurram.com"}
                    </a>
                </p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 0 1.5rem 0.5rem;
                        background: #111;
                    }
                    .site-footer-content {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .site-footer-name {
                        color: #ff6b6b;
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin: 0 0 0.25rem 0;
                    }
                    .site-footer-link {
                        margin: 0;
                        font-size: 0.875rem;
                    }
                    .site-footer-link a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .site-footer-link a:hover {
                        color: #ffffff;
                    }
                "#}
            </style>
        </footer>
    }
}
