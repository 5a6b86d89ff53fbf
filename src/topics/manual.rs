//! Literal datasets for topics the grapher does not publish.

use super::DataPoint;

/// A hand-curated series with its own prose and column label.
#[derive(Debug)]
pub struct ManualSeries {
    pub description: &'static str,
    pub value_column: &'static str,
    /// Ascending by year.
    pub points: &'static [DataPoint],
}

const fn p(year: i32, value: f64) -> DataPoint {
    DataPoint { year, value }
}

pub static LEGAL_SLAVERY: ManualSeries = ManualSeries {
    description: "The number of countries where slavery is legal has dropped from 194 in 1800 to just 3 today.",
    value_column: "Number of countries where slavery is legal",
    points: &[
        p(1800, 194.0), p(1820, 189.0), p(1840, 174.0), p(1860, 165.0),
        p(1880, 160.0), p(1900, 158.0), p(1920, 157.0), p(1940, 145.0),
        p(1960, 102.0), p(1980, 54.0), p(2000, 15.0), p(2017, 3.0),
    ],
};

pub static WOMENS_SUFFRAGE: ManualSeries = ManualSeries {
    description: "The number of countries where women have the right to vote has grown from 1 in 1893 to 195 today.",
    value_column: "Number of countries",
    points: &[
        p(1893, 1.0), p(1906, 2.0), p(1913, 3.0), p(1915, 5.0), p(1917, 11.0),
        p(1918, 17.0), p(1919, 22.0), p(1920, 26.0), p(1921, 27.0), p(1922, 29.0),
        p(1924, 33.0), p(1925, 34.0), p(1928, 35.0), p(1931, 37.0), p(1932, 40.0),
        p(1934, 42.0), p(1937, 43.0), p(1938, 44.0), p(1940, 45.0), p(1942, 46.0),
        p(1944, 48.0), p(1945, 60.0), p(1946, 68.0), p(1947, 75.0), p(1948, 81.0),
        p(1949, 84.0), p(1950, 86.0), p(1951, 94.0), p(1952, 97.0), p(1953, 100.0),
        p(1954, 103.0), p(1955, 109.0), p(1956, 116.0), p(1957, 119.0), p(1958, 124.0),
        p(1959, 128.0), p(1960, 132.0), p(1961, 139.0), p(1962, 144.0), p(1963, 151.0),
        p(1964, 154.0), p(1965, 157.0), p(1967, 161.0), p(1968, 163.0), p(1970, 166.0),
        p(1971, 167.0), p(1974, 169.0), p(1975, 174.0), p(1976, 176.0), p(1977, 177.0),
        p(1979, 180.0), p(1980, 181.0), p(1984, 182.0), p(1986, 183.0), p(1989, 184.0),
        p(1990, 185.0), p(1991, 186.0), p(1994, 187.0), p(1996, 188.0), p(1997, 189.0),
        p(2002, 190.0), p(2003, 191.0), p(2005, 192.0), p(2006, 193.0), p(2015, 194.0),
        p(2020, 194.0), p(2023, 195.0),
    ],
};

pub static MONITORED_SPECIES: ManualSeries = ManualSeries {
    description: "The number of species evaluated for conservation status has grown from 34 in 1959 to over 157,000 today.",
    value_column: "Evaluated Species",
    points: &[
        p(1959, 34.0), p(1960, 34.0), p(1970, 50.0), p(1980, 200.0),
        p(1990, 2500.0), p(1995, 5000.0), p(2000, 22456.0), p(2002, 25000.0),
        p(2004, 45000.0), p(2006, 45000.0), p(2010, 65000.0), p(2012, 75000.0),
        p(2014, 90000.0), p(2016, 105000.0), p(2018, 125000.0), p(2020, 135000.0),
        p(2022, 150000.0), p(2023, 157190.0),
    ],
};

pub static COMPREHENSIVE_VACCINATION: ManualSeries = ManualSeries {
    description: "Share of one-year-olds with all six basic vaccines",
    value_column: "Lowest vaccination rate (%)",
    points: &[
        p(2000, 13.0), p(2001, 14.0), p(2002, 17.0), p(2003, 18.0), p(2004, 19.0),
        p(2005, 20.0), p(2006, 21.0), p(2007, 25.0), p(2008, 28.0), p(2009, 38.0),
        p(2010, 40.0), p(2011, 43.0), p(2012, 45.0), p(2013, 51.0), p(2014, 55.0),
        p(2015, 63.0), p(2016, 70.0), p(2017, 71.0), p(2018, 73.0), p(2019, 74.0),
        p(2020, 73.0), p(2021, 72.0), p(2022, 76.0),
    ],
};

pub static CHILD_CANCER_SURVIVAL: ManualSeries = ManualSeries {
    description: "5-year survival rates for childhood cancer have improved from 58% in 1975 to 80% in 2010.",
    value_column: "5-Year Survival (%)",
    points: &[
        p(1975, 58.0), p(1980, 60.0), p(1985, 63.0), p(1990, 66.0),
        p(1995, 70.0), p(2000, 75.0), p(2005, 78.0), p(2010, 80.0),
    ],
};

pub static PROTECTED_LAND: ManualSeries = ManualSeries {
    description: "The share of land under legal protection has grown from virtually zero to nearly 18%.",
    value_column: "Protected (%)",
    points: &[
        p(1900, 0.03), p(1910, 0.05), p(1920, 0.07), p(1930, 0.1), p(1940, 0.15),
        p(1950, 0.35), p(1960, 0.8), p(1970, 2.0), p(1980, 4.5), p(1990, 8.9),
        p(2000, 12.0), p(2010, 15.0), p(2020, 17.0), p(2023, 17.9),
    ],
};
