mod alphabets;
mod create_values;

/// Generates the tuple conversions into `Values` and the typed `FromValues`
/// extraction out of them, for every arity the crate supports.
#[proc_macro]
pub fn create_values(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    create_values::create().into()
}
