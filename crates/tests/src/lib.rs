
#[cfg(test)]
mod case_intake_tests;


#[cfg(test)]
mod guidance_dedup_tests;

#[cfg(test)]
mod guidance_fallback_tests;

#[cfg(test)]
mod guidance_timeline_tests;

#[cfg(test)]
mod citation_format_tests;

#[cfg(test)]
mod statute_url_tests;

#[cfg(test)]
mod knowledge_table_tests;

#[cfg(test)]
mod deadline_dates_tests;
