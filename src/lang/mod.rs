mod value;
pub use value::*;

mod value_type;
pub use value_type::*;

mod function;
pub use function::*;

mod class;
pub use class::*;

mod object;
pub use object::*;
