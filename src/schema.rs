// Mirrors the tables written by the timing software. Only the columns the
// report reads are declared.

diesel::table! {
    #[sql_name = "TTIMEINFOS_HEAT1"]
    heat1_times (bib) {
        #[sql_name = "C_NUM"]
        bib -> Integer,
        #[sql_name = "C_STATUS"]
        status -> Nullable<Integer>,
        #[sql_name = "C_TIME"]
        time -> Nullable<BigInt>,
    }
}

diesel::table! {
    #[sql_name = "TTIMEINFOS_HEAT2"]
    heat2_times (bib) {
        #[sql_name = "C_NUM"]
        bib -> Integer,
        #[sql_name = "C_STATUS"]
        status -> Nullable<Integer>,
        #[sql_name = "C_TIME"]
        time -> Nullable<BigInt>,
    }
}

diesel::table! {
    #[sql_name = "TCOMPETITORS"]
    competitors (bib) {
        #[sql_name = "C_NUM"]
        bib -> Integer,
        #[sql_name = "C_LAST_NAME"]
        last_name -> Nullable<Text>,
        #[sql_name = "C_FIRST_NAME"]
        first_name -> Nullable<Text>,
        #[sql_name = "C_CATEGORY"]
        category -> Nullable<Text>,
    }
}
