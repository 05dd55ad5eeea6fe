pub mod edit_form;
pub mod profile_gallery;
