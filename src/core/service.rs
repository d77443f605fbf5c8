/// Long-lived session component (config, keybindings) that the driver wires up
/// at startup.
pub trait Service {
    fn name(&self) -> &'static str;
}
