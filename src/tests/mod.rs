mod proptest_kana;
