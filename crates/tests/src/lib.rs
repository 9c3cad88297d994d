#[cfg(test)]
mod common;


#[cfg(test)]
mod booking_filter_tests;

#[cfg(test)]
mod booking_property_tests;

#[cfg(test)]
mod statistics_tests;

#[cfg(test)]
mod display_tests;



#[cfg(test)]
mod schedule_view_tests;



#[cfg(test)]
mod case_file_tests;
