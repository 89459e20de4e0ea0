use crate::domain::network::api::NetworkApi;
use contracts::domain::network::CreateNetworkRequest;
use leptos::prelude::*;
use std::net::Ipv4Addr;
use thaw::*;

/// Проверка полей формы новой сети
pub fn build_request(
    name: &str,
    address: &str,
    netmask: &str,
    mode: &str,
) -> Result<CreateNetworkRequest, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    for (label, value) in [("address", address), ("netmask", netmask)] {
        let value = value.trim();
        if !value.is_empty() && value.parse::<Ipv4Addr>().is_err() {
            return Err(format!("Invalid {}: {}", label, value));
        }
    }
    Ok(CreateNetworkRequest {
        name: name.to_string(),
        address: address.trim().to_string(),
        netmask: netmask.trim().to_string(),
        mode: mode.trim().to_string(),
    })
}

#[component]
pub fn NetworkCreateDialog(
    open: RwSignal<bool>,
    /// Вызывается после отправки запроса
    on_created: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let netmask = RwSignal::new("255.255.255.0".to_string());
    let mode = RwSignal::new("nat".to_string());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_save = move |_| {
        match build_request(&name.get(), &address.get(), &netmask.get(), &mode.get()) {
            Ok(request) => {
                NetworkApi::default().create(&request);
                set_error.set(None);
                name.set(String::new());
                open.set(false);
                on_created.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"New Network"</DialogTitle>
                    <DialogContent>
                        <div class="form-group">
                            <label>"Name"</label>
                            <Input value=name placeholder="lan01" />
                        </div>
                        <div class="form-group">
                            <label>"Address"</label>
                            <Input value=address placeholder="172.16.1.1" />
                        </div>
                        <div class="form-group">
                            <label>"Netmask"</label>
                            <Input value=netmask />
                        </div>
                        <div class="form-group">
                            <label>"Mode"</label>
                            <Input value=mode placeholder="nat, route or empty" />
                        </div>
                        {move || error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                            "Create"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
