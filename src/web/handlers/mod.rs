//! HTML page handlers.

mod authors;

pub use authors::{
    author_list_handler, create_form_handler, delete_author_handler, edit_form_handler,
    process_create_handler, process_edit_handler, root_handler,
};
