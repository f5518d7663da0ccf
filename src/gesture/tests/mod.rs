mod fixture;
mod scorer_test;
