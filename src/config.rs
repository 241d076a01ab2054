/// Configuration for the interactive page demo
#[derive(Clone)]
pub struct DemoConfig {
    pub time_step: f32,
    pub scheme: u8,
}
