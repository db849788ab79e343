pub mod state;

use self::state::{CarouselPhase, CarouselState};
use crate::domain::a006_banner::api::fetch_active_banners;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::scheduler::{RepeatingTask, TaskSlot, TimerCommand};
use contracts::domain::a006_banner::aggregate::Banner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Promotional carousel of the home page.
///
/// Fetches the active banners once, then advances every
/// `[carousel].interval_ms`. Manual navigation restarts the period.
#[component]
pub fn BannerCarousel() -> impl IntoView {
    let state = RwSignal::new(CarouselState::new());
    let timer = StoredValue::new_local(TaskSlot::<RepeatingTask>::new());
    let interval_ms = config().carousel.interval_ms;

    let schedule = move || {
        state
            .with_untracked(|s| s.auto_advance_enabled())
            .then(|| {
                RepeatingTask::every(interval_ms, move || {
                    // banners never change while the task runs, so the tick
                    // cannot ask for a cancel here
                    state.try_update(|s| {
                        s.tick();
                    });
                })
            })
    };

    let apply = move |command: TimerCommand| {
        timer.with_value(|slot| slot.apply(command, schedule));
    };

    spawn_local(async move {
        let command = match fetch_active_banners().await {
            Ok(banners) => {
                log::debug!("Carrusel: {} banners activos", banners.len());
                state.try_update(|s| s.loaded(banners))
            }
            Err(e) => {
                log::error!("Error cargando banners: {}", e);
                state.try_update(|s| s.load_failed())
            }
        };
        if let Some(command) = command {
            apply(command);
        }
    });

    on_cleanup(move || {
        timer.try_with_value(|slot| slot.cancel());
    });

    let phase = Memo::new(move |_| state.with(|s| s.phase()));

    move || match phase.get() {
        CarouselPhase::Loading => view! {
            <div class="carousel-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        CarouselPhase::Empty => ().into_any(),
        CarouselPhase::Showing => {
            let banners = state.with_untracked(|s| s.banners().to_vec());
            view! { <CarouselSlides state=state banners=banners on_command=apply /> }.into_any()
        }
    }
}

#[component]
fn CarouselSlides<F>(
    state: RwSignal<CarouselState>,
    banners: Vec<Banner>,
    on_command: F,
) -> impl IntoView
where
    F: Fn(TimerCommand) + Copy + Send + Sync + 'static,
{
    let go_to = move |index: usize| {
        if let Some(command) = state.try_update(|s| s.go_to_slide(index)) {
            on_command(command);
        }
    };
    let go_prev = move |_: leptos::ev::MouseEvent| {
        if let Some(command) = state.try_update(|s| s.go_to_prev()) {
            on_command(command);
        }
    };
    let go_next = move |_: leptos::ev::MouseEvent| {
        if let Some(command) = state.try_update(|s| s.go_to_next()) {
            on_command(command);
        }
    };

    let active = move || state.with(|s| s.active_index());
    let show_controls = state.with_untracked(|s| s.controls_visible());
    let shadow = move || {
        let color = state.with(|s| {
            s.active_banner()
                .map(|b| b.border_color().to_string())
                .unwrap_or_default()
        });
        format!("box-shadow: 0 4px 8px {};", color)
    };

    let indicators = (0..banners.len())
        .map(|index| {
            view! {
                <button
                    type="button"
                    class="carousel__indicator"
                    class:carousel__indicator--active=move || active() == index
                    aria-current=move || if active() == index { "true" } else { "false" }
                    aria-label=format!("Slide {}", index + 1)
                    on:click=move |_| go_to(index)
                ></button>
            }
        })
        .collect_view();

    let slides = banners
        .into_iter()
        .enumerate()
        .map(|(index, banner)| {
            view! {
                <div
                    class="carousel__item"
                    class:carousel__item--active=move || active() == index
                >
                    <BannerSlide banner=banner />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="banner-carousel">
            <div class=move || {
                format!("carousel slide {}", state.with(|s| s.direction().css_class()))
            }>
                <div class="carousel__indicators">{indicators}</div>
                <div class="carousel__inner" style=shadow>
                    {slides}
                </div>
                <Show when=move || show_controls>
                    <button type="button" class="carousel__control carousel__control--prev" on:click=go_prev>
                        {icon("chevron-left")}
                        <span class="visually-hidden">"Anterior"</span>
                    </button>
                    <button type="button" class="carousel__control carousel__control--next" on:click=go_next>
                        {icon("chevron-right")}
                        <span class="visually-hidden">"Siguiente"</span>
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BannerSlide(banner: Banner) -> impl IntoView {
    let src = banner.image_source().unwrap_or_default();
    let image = view! {
        <img class="carousel__image" src=src alt=banner.titulo.clone() />
    };

    let media = match banner.link() {
        Some(link) => view! {
            <a href=link.to_string() target="_blank" rel="noopener noreferrer">
                {image}
            </a>
        }
        .into_any(),
        None => image.into_any(),
    };

    let caption = banner.has_caption().then(|| {
        let titulo = (!banner.titulo.trim().is_empty()).then(|| view! { <h5>{banner.titulo.clone()}</h5> });
        let descripcion = (!banner.descripcion.trim().is_empty())
            .then(|| view! { <p>{banner.descripcion.clone()}</p> });
        view! {
            <div class="carousel__caption">
                {titulo}
                {descripcion}
            </div>
        }
    });

    view! {
        {media}
        {caption}
    }
}
