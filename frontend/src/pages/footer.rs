use crate::app::use_language;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let t = &language.store.t().footer;

    html! {
        <footer class="site-footer">
            <div class="footer-glow"></div>

            <div class="footer-statement">
                <div class="statement-layers">
                    <h1 class="statement-faded">{t.representation}</h1>
                    <h1 class="statement-faded statement-overlay">{t.representation}</h1>
                </div>
                <div class="statement-main">
                    <h1 class="statement-serif">{t.redefined}</h1>
                </div>
                <div class="statement-rule"></div>
                <div class="statement-tagline">
                    <div class="hairline"></div>
                    <div>{t.legal_intelligence}</div>
                    <div class="hairline"></div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="footer-logo cursor-pointer">
                    <img src="/assets/lexia-logo.svg" alt="Lexia Logo" />
                </div>
                <div class="footer-links">
                    <span class="cursor-pointer">{t.privacy}</span>
                    <span class="cursor-pointer">{t.terms}</span>
                    <span class="cursor-pointer">{t.security}</span>
                </div>
                <div class="footer-dots">
                    <div class="dot dot-full"></div>
                    <div class="dot dot-half"></div>
                    <div class="dot dot-faint"></div>
                </div>
            </div>
        </footer>
    }
}
