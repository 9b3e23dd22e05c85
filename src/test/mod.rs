pub(crate) mod object;
