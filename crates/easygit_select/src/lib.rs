mod select;

pub use select::{
    ConfirmBuilder, EasySelect, InputBuilder, MultiSelectBuilder, SelectBuilder, pause,
};
