use yew::prelude::*;

use crate::content::STUDIO_NAME;

/// Full-screen spinner shown before the page mounts.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #F4F7F5;
                        z-index: 50;
                    }
                    .loading-inner {
                        text-align: center;
                        animation: loading-pop 0.5s ease-out both;
                    }
                    .loading-spinner {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border: 4px solid #A0F0D1;
                        border-top-color: #3FA96B;
                        border-radius: 50%;
                        animation: loading-spin 2s linear infinite;
                    }
                    .loading-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #333840;
                        opacity: 0;
                        animation: loading-fade 0.4s ease-out 0.5s forwards;
                    }
                    @keyframes loading-pop {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes loading-spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes loading-fade {
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <div class="loading-inner">
                <div class="loading-spinner"></div>
                <h2 class="loading-title">{STUDIO_NAME}</h2>
            </div>
        </div>
    }
}
