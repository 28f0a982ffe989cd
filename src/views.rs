pub mod admin;
pub mod calendar;
pub mod cards;
pub mod detail;
pub mod status;
pub mod table;
mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    Calendar,
    Cards,
    Table,
    Detail,
    Admin,
}
