use crate::domain::instance::api::InstanceApi;
use contracts::domain::instance::CreateInstanceRequest;
use leptos::prelude::*;
use thaw::*;

fn parse_positive(label: &str, value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("{} must be a positive number", label)),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Поля формы новой машины
#[derive(Debug, Clone, Default)]
pub struct InstanceForm {
    pub name: String,
    pub cpu: String,
    pub memory: String,
    pub disk_size: String,
    pub iso_file: String,
    pub datastore: String,
    pub network: String,
}

impl InstanceForm {
    pub fn build_request(&self) -> Result<CreateInstanceRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let cpu = parse_positive("CPU", &self.cpu)?;
        let cpu = u32::try_from(cpu).map_err(|_| "CPU is out of range".to_string())?;
        Ok(CreateInstanceRequest {
            name: name.to_string(),
            cpu,
            memory: parse_positive("Memory", &self.memory)?,
            disk_size: parse_positive("Disk size", &self.disk_size)?,
            iso_file: non_empty(&self.iso_file),
            datastore: non_empty(&self.datastore),
            network: non_empty(&self.network),
        })
    }
}

#[component]
pub fn InstanceCreateDialog(open: RwSignal<bool>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let cpu = RwSignal::new("2".to_string());
    let memory = RwSignal::new("2048".to_string());
    let disk_size = RwSignal::new("10".to_string());
    let iso_file = RwSignal::new(String::new());
    let datastore = RwSignal::new("01".to_string());
    let network = RwSignal::new("virbr0".to_string());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_save = move |_| {
        let form = InstanceForm {
            name: name.get(),
            cpu: cpu.get(),
            memory: memory.get(),
            disk_size: disk_size.get(),
            iso_file: iso_file.get(),
            datastore: datastore.get(),
            network: network.get(),
        };
        match form.build_request() {
            Ok(request) => {
                InstanceApi::default().create(&request);
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
                    <DialogTitle>"New Instance"</DialogTitle>
                    <DialogContent>
                        <div class="form-group">
                            <label>"Name"</label>
                            <Input value=name placeholder="centos7" />
                        </div>
                        <div class="form-group">
                            <label>"CPU"</label>
                            <Input value=cpu />
                        </div>
                        <div class="form-group">
                            <label>"Memory, MiB"</label>
                            <Input value=memory />
                        </div>
                        <div class="form-group">
                            <label>"Disk size, GiB"</label>
                            <Input value=disk_size />
                        </div>
                        <div class="form-group">
                            <label>"ISO file"</label>
                            <Input value=iso_file placeholder="/lightstar/datastore/01/centos7.iso" />
                        </div>
                        <div class="form-group">
                            <label>"DataStore"</label>
                            <Input value=datastore />
                        </div>
                        <div class="form-group">
                            <label>"Network"</label>
                            <Input value=network />
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

    fn form() -> InstanceForm {
        InstanceForm {
            name: "centos7".into(),
            cpu: "2".into(),
            memory: "2048".into(),
            disk_size: "10".into(),
            iso_file: " ".into(),
            datastore: "01".into(),
            network: "virbr0".into(),
        }
    }

    #[test]
    fn test_build_request() {
        let request = form().build_request().unwrap();
        assert_eq!(request.cpu, 2);
        assert_eq!(request.memory, 2048);
        assert_eq!(request.iso_file, None);
        assert_eq!(request.datastore.as_deref(), Some("01"));
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        let mut f = form();
        f.cpu = "0".into();
        assert_eq!(f.build_request().unwrap_err(), "CPU must be a positive number");
        let mut f = form();
        f.memory = "2G".into();
        assert!(f.build_request().is_err());
        let mut f = form();
        f.name = "  ".into();
        assert!(f.build_request().is_err());
    }
}
