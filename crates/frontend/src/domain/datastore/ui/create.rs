use crate::domain::datastore::api::DataStoreApi;
use contracts::domain::datastore::{is_domain_pool, CreateDataStoreRequest};
use leptos::prelude::*;
use thaw::*;

/// Корень, под которым по умолчанию создаются каталоги пулов
pub const DATASTORE_ROOT: &str = "/lightstar/datastore";

pub fn build_request(name: &str, path: &str) -> Result<CreateDataStoreRequest, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if is_domain_pool(name) || name.contains('/') {
        return Err(format!("Invalid name: {}", name));
    }
    let path = match path.trim() {
        "" => format!("{}/{}", DATASTORE_ROOT, name),
        p if p.starts_with('/') => p.to_string(),
        p => return Err(format!("Path must be absolute: {}", p)),
    };
    Ok(CreateDataStoreRequest::dir(name, path))
}

#[component]
pub fn DataStoreCreateDialog(open: RwSignal<bool>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_save = move |_| match build_request(&name.get(), &path.get()) {
        Ok(request) => {
            DataStoreApi::default().create(&request);
            set_error.set(None);
            name.set(String::new());
            path.set(String::new());
            open.set(false);
            on_created.run(());
        }
        Err(e) => set_error.set(Some(e)),
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"New DataStore"</DialogTitle>
                    <DialogContent>
                        <div class="form-group">
                            <label>"Name"</label>
                            <Input value=name placeholder="02" />
                        </div>
                        <div class="form-group">
                            <label>"Path"</label>
                            <Input value=path placeholder=DATASTORE_ROOT />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let request = build_request("02", "").unwrap();
        assert_eq!(request.path, "/lightstar/datastore/02");
        assert_eq!(request.kind, "dir");
    }

    #[test]
    fn test_rejects_bad_names_and_paths() {
        assert!(build_request("", "").is_err());
        assert!(build_request(".vm01", "").is_err());
        assert!(build_request("a/b", "").is_err());
        assert!(build_request("02", "data/02").is_err());
        assert_eq!(build_request("02", "/data/02").unwrap().path, "/data/02");
    }
}
