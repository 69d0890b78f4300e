pub mod commands {
    pub mod register_citizen;
}
pub mod records;
