use super::manual::{
    CHILD_CANCER_SURVIVAL, COMPREHENSIVE_VACCINATION, LEGAL_SLAVERY, MONITORED_SPECIES,
    PROTECTED_LAND, WOMENS_SUFFRAGE,
};
use super::Polarity::{Decreasing as Down, Increasing as Up};
use super::{ColumnBoost, ManualSeries, Polarity, SourceKind, TopicConfig, TopicKind};

const PARITY_BOOST: ColumnBoost = ColumnBoost {
    needles: &["parity"],
    bonus: 20,
};

const DEMOCRACY_PARTS: &[&[&str]] = &[
    &[
        "electoral democracies",
        "electoral democracy",
        "electoral_democracy",
    ],
    &["liberal democracies", "liberal democracy", "liberal_democracy"],
];

const fn fetched(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    slug: &'static str,
    direction: Polarity,
) -> TopicConfig {
    TopicConfig {
        id,
        title,
        description,
        source: SourceKind::External,
        slug: Some(slug),
        direction,
        kind: TopicKind::Fetched { boost: None },
    }
}

const fn manual(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    direction: Polarity,
    data: Option<&'static ManualSeries>,
) -> TopicConfig {
    TopicConfig {
        id,
        title,
        description,
        source: SourceKind::Manual,
        slug: None,
        direction,
        kind: TopicKind::ManualLiteral(data),
    }
}

/// Every tracked topic, in publication order.
#[rustfmt::skip]
pub static TOPICS: &[TopicConfig] = &[
    // Bad things decreasing
    fetched("child-mortality", "Children Dying", "The percentage of children dying before their fifth birthday has dramatically declined.", "child-mortality", Down),
    fetched("hiv-infections", "HIV Infections", "The rate of new HIV infections per million people has been falling.", "new-hiv-infections", Down),
    fetched("battle-deaths", "Battle Deaths", "The number of deaths in state-based conflicts per 100,000 people has fallen to historic lows.", "state-based-battle-related-deaths-per-100000-since-1946", Down),
    fetched("oil-spills", "Oil Spills", "The volume of oil spilled from tankers has significantly decreased.", "quantity-oil-spills", Down),
    fetched("solar-price", "Expensive Solar Panels", "The price of solar energy has plummeted.", "solar-pv-prices", Down),
    fetched("so2-emissions", "Smoke Particles", "The amount of smoke particles (SO₂) emitted per person has decreased.", "so-emissions-by-world-region-in-million-tonnes", Down),
    fetched("ozone-depletion", "Ozone Depletion", "The production of ozone-depleting substances has been almost entirely phased out.", "ozone-depleting-substance-consumption", Down),
    fetched("plane-deaths", "Plane Crash Deaths", "Aviation fatalities per million passengers have dramatically declined, making flying safer than ever.", "aviation-fatalities-per-million-passengers", Down),
    fetched("disaster-deaths", "Deaths from Disaster", "The number of people killed by natural disasters has fallen significantly over the last century.", "number-of-deaths-from-natural-disasters", Down),
    fetched("nuclear-warheads", "Nuclear Arms", "The total number of nuclear warheads has been reduced since the Cold War peak.", "nuclear-warhead-stockpiles", Down),
    fetched("child-labor", "Child Labor", "The percentage of children aged 5-14 who work full-time under bad conditions has decreased.", "children-in-employment-total-percent-of-children-ages-7-14", Down),
    fetched("hunger", "Hunger", "The share of people who are undernourished has been falling.", "prevalence-of-undernourishment", Down),
    fetched("extreme-poverty", "Extreme Poverty", "The share of humanity living on less than $3/day has fallen from >40% in 1981 to <10% today.", "share-of-population-in-extreme-poverty", Down),
    fetched("maternal-mortality", "Maternal Deaths", "Global maternal deaths have more than halved since 1990.", "maternal-mortality", Down),
    fetched("malaria-deaths", "Malaria Deaths", "Age-standardised malaria deaths per 100,000 people have dropped by ~45% since 2000.", "malaria-death-rates", Down),
    fetched("co2-intensity", "CO₂ Intensity", "Each dollar of world GDP now emits ~40% less CO₂ than in 1990.", "co2-intensity", Down),
    // Good things increasing
    manual("womens-suffrage", "Women's Right to Vote", "The number of countries where women have the right to vote has grown from 1 in 1893 to 195 today.", Up, Some(&WOMENS_SUFFRAGE)),
    fetched("cereal-yield", "Harvest", "The amount of cereal yield (in tonnes per hectare) has increased, meaning more food from the same land.", "cereal-yield", Up),
    fetched("literacy", "Literacy", "The share of adults who are literate has risen dramatically.", "literacy-rate-adults", Up),
    TopicConfig {
        id: "democracy",
        title: "Democracy",
        description: "The number of countries that are electoral or liberal democracies has increased significantly.",
        source: SourceKind::External,
        slug: Some("countries-democracies-autocracies-row.csv?v=1&csvType=full&useColumnShortNames=true"),
        direction: Up,
        kind: TopicKind::FetchedComposite {
            parts: DEMOCRACY_PARTS,
            label: "Electoral + Liberal democracies (countries)",
        },
    },
    TopicConfig {
        id: "girls-school",
        title: "Girls in School",
        description: "The share of girls of primary school age who are enrolled has risen to near-parity with boys.",
        source: SourceKind::External,
        slug: Some("net-enrollment-rate-primary-gender-parity-index-gpi"),
        direction: Up,
        kind: TopicKind::Fetched { boost: Some(PARITY_BOOST) },
    },
    fetched("electricity", "Electricity Coverage", "The share of people with some access to electricity has grown.", "share-of-the-population-with-access-to-electricity", Up),
    fetched("mobile-phones", "Mobile Phones", "The share of people with a mobile phone subscription has skyrocketed.", "mobile-cellular-subscriptions-per-100-people", Up),
    fetched("water-access", "Water", "The share of people with access to a protected water source has increased.", "population-using-at-least-basic-drinking-water", Up),
    fetched("internet", "Internet", "The share of people using the internet has seen rapid growth.", "share-of-individuals-using-the-internet", Up),
    fetched("immunization", "Immunization", "The share of 1-year-olds who have received at least one vaccination has greatly increased.", "share-of-one-year-olds-vaccinated-against-dtp3", Up),
    fetched("scientific-papers", "Science", "The number of scholarly articles published per year has seen exponential growth.", "scientific-and-technical-journal-articles", Up),
    fetched("renewable-energy", "Clean Power", "Renewables' share of global electricity has doubled in a decade, passing 30% in 2024.", "share-of-electricity-production-from-renewable-sources", Up),
    fetched("life-expectancy", "Life Expectancy", "Average life expectancy has climbed from 52 years in 1960 to 73 years in 2023.", "life-expectancy", Up),
    // More bad things decreasing
    fetched("smoking-prevalence", "Smoking", "Global smoking rates have fallen by roughly a quarter since 1990, saving millions of lives.", "share-of-adults-who-smoke", Down),
    fetched("homicide-rate", "Homicide Rate", "Intentional killings per 100k people have fallen by a third since the early 1990s.", "homicide-rate-unodc", Down),
    // More good things increasing
    fetched("sanitation-access", "Improved Sanitation", "Two-thirds of humanity had safe sanitation in 2022, up from half in 2000.", "share-using-safely-managed-sanitation", Up),
    manual("protected-land", "Protected Land", "The share of land under legal protection has grown from virtually zero to nearly 18%.", Up, Some(&PROTECTED_LAND)),
    manual("monitored-species", "Monitored Species", "The number of species evaluated for conservation status has grown from 34 in 1959 to over 157,000 today.", Up, Some(&MONITORED_SPECIES)),
    manual("comprehensive-vaccination", "Comprehensive Vaccination", "Share of one-year-olds with all six basic vaccines", Up, Some(&COMPREHENSIVE_VACCINATION)),
    manual("child-cancer-survival", "Child Cancer Survival", "5-year survival rates for childhood cancer have improved from 58% in 1975 to 80% in 2010.", Up, Some(&CHILD_CANCER_SURVIVAL)),
    // Manual placeholders
    manual("legal-slavery", "Legal Slavery", "The share of countries where slavery is legal has dropped to zero.", Down, Some(&LEGAL_SLAVERY)),
    manual("death-penalty", "Death Penalty", "The number of countries that have abolished the death penalty has steadily increased.", Up, None),
    manual("leaded-gasoline", "Leaded Gasoline", "The number of countries using leaded gasoline has dropped to just a few.", Down, None),
    manual("smallpox", "Smallpox", "The number of countries with smallpox has been eliminated (the disease is eradicated).", Down, None),
];
