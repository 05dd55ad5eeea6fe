use crate::profile::{Field, ProfileId, ProfileRecord};

/// The sample team present when a session starts.
pub(crate) fn records() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord::new(ProfileId::new(1))
            .with(Field::Name, "Gaurav Singh")
            .with(
                Field::Image,
                "https://white-force.com/plus/src/public/member_images/e8rarmLz7vTtESPGNztd.png",
            )
            .with(
                Field::Description,
                "Passionate about creating beautiful user experiences and capturing moments \
                 through my lens. Always exploring new creative possibilities and pushing \
                 boundaries in design.",
            )
            .with(Field::Gender, "Male")
            .with(Field::Dob, "1996-04-15")
            .with(Field::MaritalStatus, "Married")
            .with(Field::Education, "Master in Design, Stanford University")
            .with(Field::Career, "UI/UX Designer")
            .with(Field::CareerStatus, "Full-time at Google"),
        ProfileRecord::new(ProfileId::new(2))
            .with(Field::Name, "Amrendra")
            .with(
                Field::Image,
                "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&dpr=1&w=500",
            )
            .with(
                Field::Description,
                "Software architect with a passion for building scalable systems. Love to \
                 mentor young developers and contribute to open-source projects.",
            )
            .with(Field::Gender, "Male")
            .with(Field::Dob, "1998-08-23")
            .with(Field::MaritalStatus, "Single")
            .with(Field::Education, "PhD in Computer Science, MIT")
            .with(Field::Career, "Software Architect")
            .with(Field::CareerStatus, "Tech Lead at Amazon"),
        ProfileRecord::new(ProfileId::new(3))
            .with(Field::Name, "Shreddha j")
            .with(Field::Image, "https://images8.alphacoders.com/581/581559.jpg")
            .with(
                Field::Description,
                "Digital marketing specialist with expertise in growth hacking and brand \
                 development. Always data-driven and results-oriented.",
            )
            .with(Field::Gender, "Female")
            .with(Field::Dob, "2000-12-03")
            .with(Field::MaritalStatus, "Single")
            .with(Field::Education, "BA in Marketing, NYU")
            .with(Field::Career, "Marketing Manager")
            .with(Field::CareerStatus, "Senior Manager at Netflix"),
    ]
}
