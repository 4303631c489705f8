mod most_frequent;

pub(crate) use most_frequent::MostFrequentDiagnosesPage;
