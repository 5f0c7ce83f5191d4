pub mod commands {
    pub mod clock_in;
    pub mod clock_out;
}
pub mod entries;
pub mod events;
pub mod harness;
pub mod http;
pub mod scheduling;
