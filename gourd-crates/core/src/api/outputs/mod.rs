pub(crate) mod solution_iterator;
