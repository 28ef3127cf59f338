pub mod todo;

pub use todo::{
    filter_todos, format_deadline, items_left_label, parse_deadline_input, Filter, NewTodo, Todo,
    TodoPatch,
};
