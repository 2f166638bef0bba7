pub mod chimerac_compile;
