use composer::pipe;

fn filter_active_users(data: String) -> String {
    data + " - Active Users Filtered"
}

fn sort_data(data: String) -> String {
    data + " - Data Sorted"
}

fn filter_bad(data: String) -> String {
    data + " - Bad Data Filtered"
}

fn prepare_report(data: String) -> String {
    data + " - Report Prepared"
}

/// Applies every report stage to the seed, left-to-right.
pub fn build_report(seed: String) -> String {
    let stages = [
        filter_active_users as fn(String) -> String,
        sort_data,
        filter_bad,
        prepare_report,
    ];
    pipe(seed, stages)
}
