mod issuer_tests;
