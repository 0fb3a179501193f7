pub mod comparator_form;
