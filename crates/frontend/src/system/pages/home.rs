use leptos::prelude::*;

use crate::domain::a006_banner::ui::carousel::BannerCarousel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <section class="home__hero">
                <BannerCarousel />
            </section>
            <section class="home__intro">
                <h1>"Delicias Naturales"</h1>
                <p>"Alimentos naturales y orgánicos, directo a tu mesa."</p>
            </section>
        </PageFrame>
    }
}
