use crate::domain::hyper::api::HyperApi;
use crate::layout::container::Container;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_bytes;
use contracts::domain::hyper::{HyperInfo, HyperUri};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Домашняя панель: сводка по гипервизору
#[component]
#[allow(non_snake_case)]
pub fn SystemPanel() -> impl IntoView {
    let (info, set_info) = signal::<Option<HyperInfo>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match HyperApi::get().await {
                Ok(summary) => {
                    set_info.set(Some(summary.hyper));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <Container current="system" title="Home">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Home"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                {move || info.get().map(|h| {
                    let uri = HyperUri::parse(&h.name);
                    view! {
                        <div class="details-card">
                            <div class="details-card__row"><b>"Hypervisor: "</b>{h.name.clone()}</div>
                            <div class="details-card__row"><b>"Host: "</b>{h.display_host()}</div>
                            <div class="details-card__row"><b>"Schema: "</b>{uri.schema}</div>
                            <div class="details-card__row">
                                <b>"CPU: "</b>
                                {format!("{} x {} ({:.1}% used)", h.cpu_num, h.cpu_model, h.cpu_usage_percent())}
                            </div>
                            <div class="details-card__row">
                                <b>"Memory: "</b>
                                {format!("{} used of {}", format_bytes(h.mem_used()), format_bytes(h.mem_total))}
                            </div>
                        </div>
                    }
                })}
            </div>
        </Container>
    }
}
