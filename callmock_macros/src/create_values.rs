use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Index};

use crate::alphabets::{alphabets, MAX_ARITY};

pub(crate) fn create() -> TokenStream {
    let items = alphabets(0..=MAX_ARITY).map(|types| values_impl(&types));
    quote![#(#items)*]
}

fn values_impl(names: &[&str]) -> TokenStream {
    let (args, types): (Vec<_>, Vec<_>) = names
        .iter()
        .map(|name| {
            (
                Ident::new(&name.to_lowercase(), Span::call_site()),
                Ident::new(name, Span::call_site()),
            )
        })
        .unzip();
    let arity = args.len();
    let extracts = args.iter().enumerate().map(|(index, arg)| {
        let ty = &types[index];
        let index = Index::from(index);
        quote![#ty::from_value(#arg).map_err(|error| error.at(#index))?]
    });
    quote! {
        impl<#(#types: Into<Value>),*> From<(#(#types,)*)> for Values {
            fn from((#(#args,)*): (#(#types,)*)) -> Self {
                Values::from(vec![#(#args.into()),*])
            }
        }

        impl<#(#types: FromValue),*> FromValues for (#(#types,)*) {
            fn from_values(values: Values) -> Result<Self, ValueError> {
                let [#(#args),*]: [Value; #arity] = values
                    .into_vec()
                    .try_into()
                    .map_err(|values: Vec<Value>| ValueError::Arity {
                        expected: #arity,
                        found: values.len(),
                    })?;
                Ok((#(#extracts,)*))
            }
        }
    }
}
