mod csv_test;
