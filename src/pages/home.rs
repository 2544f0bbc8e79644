use yew::prelude::*;

use crate::components::scrolling_text::ScrollingText;
use crate::components::world_map::WorldMap;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <header class="hero">
                <WorldMap />
                <div class="hero-content">
                    <h1>{"Multi Region Infrastructure"}</h1>
                    <p class="hero-subtitle">
                        {"Enterprise-grade infrastructure deployment across multiple AWS regions for maximum reliability and global reach."}
                    </p>
                </div>
            </header>
            <ScrollingText />
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 400vh;
                        background: #111;
                        color: #ffffff;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1rem;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #111, rgba(17, 17, 17, 0.95), #111);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                    }
                    .hero-content h1 {
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem 0;
                    }
                    .hero-subtitle {
                        color: #9ca3af;
                        font-size: 1.25rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    @media (min-width: 768px) {
                        .hero-content h1 {
                            font-size: 6rem;
                        }
                        .hero-subtitle {
                            font-size: 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
